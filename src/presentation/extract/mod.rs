mod client_ip;

pub use client_ip::ClientIp;
