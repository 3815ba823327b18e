mod client;

pub use client::StoreClient;
