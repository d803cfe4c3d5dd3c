// Crate entry point. Declares the module tree so the binary and the integration tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod event_store;
        pub mod notifier;
        pub mod object_storage;
    }
}

pub mod modules {
    pub mod registrations {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
            pub mod tickets;
        }
        pub mod application {
            pub mod errors;
            pub mod ledger;
        }
        pub mod use_cases {
            pub mod register {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_registration {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod pay_registration {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod undo_payment {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_accommodation {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod send_payment_reminder {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod query_ledger {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replay_ledger {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod notifications;
            }
        }
    }
}

pub mod shell;
