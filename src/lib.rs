pub mod shared {
    pub mod core {
        pub mod normalize;
    }
    pub mod infrastructure {
        pub mod store_provider;
    }
}

pub mod modules {
    pub mod deals {
        pub mod core {
            pub mod deal;
            pub mod errors;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod deal_store;
                pub mod deal_store_in_memory;
            }
        }
        pub mod use_cases {
            pub mod create_deal {
                pub mod authorize;
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_deals {
                pub mod filter;
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
