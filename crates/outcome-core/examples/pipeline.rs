// Example: chaining fallible steps with Outcome
//
// Parses "host:port" listen addresses, validates them, and reports which ones
// survived. Run with RUST_LOG=trace to see short-circuited chains.

use outcome_core::{Error, Outcome};
use std::net::{IpAddr, SocketAddr};

fn split(raw: &str) -> Outcome<(&str, &str)> {
    match raw.rsplit_once(':') {
        Some(parts) => Outcome::success(parts),
        None => {
            let err = Error::parse_failed("missing ':' separator");
            Outcome::failure(err.with_context("input", raw))
        }
    }
}

fn parse(parts: (&str, &str)) -> Outcome<SocketAddr> {
    let (host, port) = parts;
    let ip = match host.parse::<IpAddr>() {
        Ok(ip) => ip,
        Err(err) => {
            let err = Error::parse_failed(err.to_string());
            return Outcome::failure(err.with_context("host", host));
        }
    };

    match port.parse::<u16>() {
        Ok(port) => Outcome::success(SocketAddr::new(ip, port)),
        Err(err) => {
            let err = Error::parse_failed(err.to_string());
            Outcome::failure(err.with_context("port", port))
        }
    }
}

fn unprivileged(addr: SocketAddr) -> Outcome<SocketAddr> {
    if addr.port() < 1024 {
        let err = Error::invalid_argument("privileged port");
        Outcome::failure(err.with_context("port", addr.port().to_string()))
    } else {
        Outcome::success(addr)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let inputs = [
        "127.0.0.1:8080",
        "localhost",
        "10.0.0.1:80",
        "::1:9000",
        "1.2.3.4:http",
    ];
    let fallback: SocketAddr = ([0, 0, 0, 0], 8080).into();

    for raw in inputs {
        let outcome = split(raw).then(parse).then(unprivileged);
        match outcome.error() {
            None => tracing::info!(input = raw, "accepted"),
            Some(err) => tracing::warn!(input = raw, error = %err, "rejected"),
        }
        println!("{raw:>16} -> {}", outcome.value_or(fallback));
    }

    // The configured default is known to be valid.
    let default = parse(("0.0.0.0", "8080"))
        .then(unprivileged)
        .value_or_panic();
    println!("{:>16} -> {default}", "default");
}
