diesel::table! {
    owners (owner_id) {
        owner_id -> Int8,
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    vaccines (vaccine_id) {
        vaccine_id -> Int8,
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    pets (pet_id) {
        pet_id -> Int8,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 100]
        pet_type -> Varchar,
        age -> Int4,
        owner_id -> Int8,
        row_version -> Int8,
    }
}

diesel::table! {
    pet_vaccines (pet_id, vaccine_id) {
        pet_id -> Int8,
        vaccine_id -> Int8,
        added_at -> Timestamptz,
    }
}

diesel::joinable!(pets -> owners (owner_id));
diesel::joinable!(pet_vaccines -> pets (pet_id));
diesel::joinable!(pet_vaccines -> vaccines (vaccine_id));

diesel::allow_tables_to_appear_in_same_query!(owners, vaccines, pets, pet_vaccines);
