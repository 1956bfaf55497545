use std::env;
use std::io;
use std::net::TcpStream;

use natter::endpoint::Endpoint;
use natter::relay;

const PEER_LABEL: &str = "them> ";

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("usage: {} <host> <port>", args[0]);
        return Ok(());
    }

    let port = parse_port(&args[2])?;
    let stream = TcpStream::connect((args[1].as_str(), port))?;
    let endpoint = Endpoint::new(stream);

    println!("[*] Connected to {}", endpoint.peer_addr()?);

    relay::run(endpoint, PEER_LABEL)
}

fn parse_port(arg: &str) -> io::Result<u16> {
    arg.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "The port must be a number between 0 and 65535.",
        )
    })
}
