pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod list;
        pub mod metrics;
        pub mod stock;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod metrics;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod list;
            pub mod metrics;
            pub mod stock;
            pub mod update;
        }
    }
}
