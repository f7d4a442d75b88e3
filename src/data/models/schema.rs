diesel::table! {
    users (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        password_hash -> Nullable<Varchar>,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 20]
        role -> Varchar,
        created_at -> Datetime,
    }
}

diesel::table! {
    products (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 255]
        name -> Varchar,
        description -> Text,
        price -> Decimal,
        #[max_length = 100]
        category -> Varchar,
        #[max_length = 100]
        brand -> Varchar,
        images -> Text,
        stock -> Integer,
        rating -> Double,
        review_count -> Integer,
        created_at -> Datetime,
    }
}

diesel::table! {
    reviews (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 36]
        product_id -> Varchar,
        #[max_length = 36]
        user_id -> Varchar,
        #[max_length = 255]
        user_name -> Varchar,
        rating -> Integer,
        comment -> Text,
        created_at -> Datetime,
    }
}

diesel::table! {
    cart_items (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 36]
        user_id -> Varchar,
        #[max_length = 36]
        product_id -> Varchar,
        quantity -> Integer,
        created_at -> Datetime,
    }
}

diesel::table! {
    addresses (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 36]
        user_id -> Varchar,
        #[max_length = 255]
        full_name -> Varchar,
        #[max_length = 50]
        phone -> Varchar,
        #[max_length = 255]
        address_line1 -> Varchar,
        #[max_length = 255]
        address_line2 -> Nullable<Varchar>,
        #[max_length = 100]
        city -> Varchar,
        #[max_length = 100]
        state -> Varchar,
        #[max_length = 20]
        zip_code -> Varchar,
        #[max_length = 100]
        country -> Varchar,
        is_default -> Bool,
    }
}

diesel::table! {
    orders (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 36]
        user_id -> Varchar,
        subtotal -> Decimal,
        discount -> Decimal,
        total -> Decimal,
        #[max_length = 50]
        status -> Varchar,
        #[max_length = 50]
        payment_status -> Varchar,
        #[max_length = 255]
        ship_full_name -> Varchar,
        #[max_length = 50]
        ship_phone -> Varchar,
        #[max_length = 255]
        ship_address_line1 -> Varchar,
        #[max_length = 255]
        ship_address_line2 -> Nullable<Varchar>,
        #[max_length = 100]
        ship_city -> Varchar,
        #[max_length = 100]
        ship_state -> Varchar,
        #[max_length = 20]
        ship_zip_code -> Varchar,
        #[max_length = 100]
        ship_country -> Varchar,
        created_at -> Datetime,
    }
}

diesel::table! {
    order_items (order_id, product_id) {
        #[max_length = 36]
        order_id -> Varchar,
        #[max_length = 36]
        product_id -> Varchar,
        #[max_length = 255]
        product_name -> Varchar,
        #[max_length = 512]
        product_image -> Varchar,
        price -> Decimal,
        quantity -> Integer,
    }
}

diesel::table! {
    discount_codes (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 50]
        code -> Varchar,
        #[max_length = 20]
        discount_type -> Varchar,
        discount_value -> Decimal,
        is_active -> Bool,
        created_at -> Datetime,
    }
}

diesel::joinable!(reviews -> products (product_id));
diesel::joinable!(cart_items -> users (user_id));
diesel::joinable!(addresses -> users (user_id));
diesel::joinable!(orders -> users (user_id));
diesel::joinable!(order_items -> orders (order_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    products,
    reviews,
    cart_items,
    addresses,
    orders,
    order_items,
    discount_codes,
);
