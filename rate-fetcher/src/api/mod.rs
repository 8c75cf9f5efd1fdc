mod p2p;

pub use p2p::P2pClient;
