use std::env;
use std::io;
use std::net::{TcpListener, TcpStream};

use natter::endpoint::Endpoint;
use natter::relay;

const PEER_LABEL: &str = "peer> ";

const BANNER: &str = r"
███╗   ██╗ █████╗ ████████╗████████╗███████╗██████╗
████╗  ██║██╔══██╗╚══██╔══╝╚══██╔══╝██╔════╝██╔══██╗
██╔██╗ ██║███████║   ██║      ██║   █████╗  ██████╔╝
██║╚██╗██║██╔══██║   ██║      ██║   ██╔══╝  ██╔══██╗
██║ ╚████║██║  ██║   ██║      ██║   ███████╗██║  ██║
╚═╝  ╚═══╝╚═╝  ╚═╝   ╚═╝      ╚═╝   ╚══════╝╚═╝  ╚═╝
";

fn main() -> io::Result<()> {
    env_logger::init();

    println!("{}", BANNER);
    println!("Peer mode: dial somebody, or wait for whoever dials you.\n");

    let args: Vec<String> = env::args().collect();

    let stream = match args.len() {
        // Host and port, dial out.
        3 => {
            let port = parse_port(&args[2])?;
            TcpStream::connect((args[1].as_str(), port))?
        }

        // Port only, wait for one call.
        2 => {
            let port = parse_port(&args[1])?;
            listen_for_one(port)?
        }

        _ => {
            println!("usage: {} [host] <port>", args[0]);
            return Ok(());
        }
    };

    let endpoint = Endpoint::new(stream);
    println!("[*] Paired with {}", endpoint.peer_addr()?);

    relay::run(endpoint, PEER_LABEL)
}

/// Accepts the first caller, then stops listening: the listener is gone
/// once this returns, so anyone else gets refused instead of silently
/// replacing the session.
fn listen_for_one(port: u16) -> io::Result<TcpStream> {
    let listener = TcpListener::bind(("0.0.0.0", port))?;
    println!("[*] Waiting for a call on port {}...", port);

    let (stream, _) = listener.accept()?;

    Ok(stream)
}

fn parse_port(arg: &str) -> io::Result<u16> {
    arg.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "The port must be a number between 0 and 65535.",
        )
    })
}
