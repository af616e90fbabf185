//! Blocking UDP transport for live queries.

use std::io;
use std::net::UdpSocket;
use std::time::Duration;

use protocol::{Request, DEFAULT_GAME_PORT};
use query::DatagramSource;

/// Where and how patiently to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub host: String,
    /// Query port, normally the game port plus one.
    pub port: u16,
    /// Per-datagram receive timeout.
    pub timeout: Duration,
    /// Receive buffer size.
    pub max_datagram_bytes: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: protocol::query_port(DEFAULT_GAME_PORT),
            timeout: Duration::from_secs(3),
            max_datagram_bytes: 65_535,
        }
    }
}

/// A connected UDP socket that hands out one datagram per receive.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl UdpTransport {
    /// Binds an ephemeral local port and connects it to the server.
    pub fn connect(config: &QueryConfig) -> io::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_read_timeout(Some(config.timeout))?;
        socket.connect((config.host.as_str(), config.port))?;
        log::debug!(
            "querying {}:{} with {:?} timeout",
            config.host,
            config.port,
            config.timeout
        );
        Ok(Self {
            socket,
            buf: vec![0u8; config.max_datagram_bytes],
        })
    }

    /// Sends one request datagram.
    pub fn send(&self, request: Request) -> io::Result<()> {
        let bytes = request.encode();
        self.socket.send(&bytes)?;
        log::debug!("sent {request:?} ({} bytes)", bytes.len());
        Ok(())
    }
}

impl DatagramSource for UdpTransport {
    type Error = io::Error;

    fn recv_datagram(&mut self) -> Result<Vec<u8>, Self::Error> {
        let len = self.socket.recv(&mut self.buf)?;
        log::trace!("received {len} bytes");
        Ok(self.buf[..len].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::ClientSelector;

    #[test]
    fn default_config_targets_query_port() {
        let config = QueryConfig::default();
        assert_eq!(config.port, 28764);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn loopback_exchange() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let config = QueryConfig {
            port: server.local_addr().unwrap().port(),
            timeout: Duration::from_millis(500),
            ..QueryConfig::default()
        };
        let mut transport = UdpTransport::connect(&config).unwrap();
        transport
            .send(Request::PlayerStats(ClientSelector::All))
            .unwrap();

        let mut buf = [0u8; 16];
        let (len, from) = server.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], &[0x00, 0x01, 0xFF]);
        server.send_to(&[1, 2, 3, 4], from).unwrap();

        assert_eq!(transport.recv_datagram().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn silence_times_out() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let config = QueryConfig {
            port: server.local_addr().unwrap().port(),
            timeout: Duration::from_millis(50),
            ..QueryConfig::default()
        };
        let mut transport = UdpTransport::connect(&config).unwrap();
        let err = transport.recv_datagram().unwrap_err();
        assert!(matches!(
            err.kind(),
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
        ));
    }
}
