table! {
    categories (id) {
        id -> Integer,
        name -> Varchar,
    }
}

table! {
    ingredients (id) {
        id -> Integer,
        name -> Varchar,
        notes -> Nullable<Text>,
        category_id -> Integer,
    }
}

joinable!(ingredients -> categories (category_id));

allow_tables_to_appear_in_same_query!(categories, ingredients);
