diesel::table! {
    #[sql_name = "Products"]
    products (asin) {
        asin -> Text,
        title -> Text,
        #[sql_name = "imgUrl"]
        img_url -> Text,
        #[sql_name = "productUrl"]
        product_url -> Text,
        stars -> Float4,
        reviews -> Int4,
        price -> Float4,
        #[sql_name = "isBestSeller"]
        is_best_seller -> Bool,
        #[sql_name = "boughtInLastMonth"]
        bought_in_last_month -> Int4,
        #[sql_name = "categoryName"]
        category_name -> Text,
    }
}

diesel::table! {
    #[sql_name = "ProductCounts"]
    product_counts (asin) {
        asin -> Text,
        count -> Int4,
    }
}

// The table carries no key constraint; diesel needs one declared.
diesel::table! {
    #[sql_name = "Baskets"]
    baskets (basket_id, product_id, user_id) {
        #[sql_name = "BasketId"]
        basket_id -> Text,
        #[sql_name = "ProductId"]
        product_id -> Text,
        #[sql_name = "UserId"]
        user_id -> Text,
        #[sql_name = "IsCheckedOut"]
        is_checked_out -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    products,
    product_counts,
    baskets,
);
