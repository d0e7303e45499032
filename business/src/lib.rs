pub mod application {
    pub mod auth {
        pub mod login;
    }
    pub mod sale {
        pub mod first_record;
        pub mod search;
        pub mod totals;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod sale {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod first_record;
            pub mod search;
            pub mod totals;
        }
    }
}
