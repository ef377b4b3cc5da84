#![no_std]

pub mod catalog {
    pub mod interface;
    pub mod types;
}

pub mod escrow {
    pub mod interface;
    pub mod types;
}

pub mod nft {
    pub mod interface;
    pub mod types;
}
