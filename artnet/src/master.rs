//! Outbound Art-Net transport and node discovery.
//!
//! The master owns at most two cached UDP connections: one for unicast/broadcast data
//! traffic (ArtDmx, ArtAddress) and one for the ArtPoll broadcast. A connection is
//! replaced only when the requested destination differs from the cached one. Sends
//! are fire-and-forget: failures are logged and never propagate to the caller, since
//! Art-Net over UDP is best-effort by design.

use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tracing::{debug, trace, warn};

use artnet_core::{
    address::AddressParameters,
    channel_assignment::ChannelAssignment,
    color::Color,
    definitions::{ARTNET_PORT, DMX_CHANNEL_COUNT},
    ip::IpAddress,
    node::NodeInfo,
    packet::{ArtAddress, ArtDmx, ArtPoll},
    port_address::Net,
};

use crate::ArtNetResult;
use crate::error::Error;

/// How long the inbound listener blocks in one receive call before re-checking its
/// shutdown flag.
const RECV_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// The default window during which [ArtNetMaster::collect_nodes] gathers replies.
/// Nodes answer an ArtPoll with a jittered delay, so the window must comfortably
/// exceed the maximum reply delay of well-behaved nodes.
const DEFAULT_POLL_WINDOW: Duration = Duration::from_secs(3);

/// The IPv4 address and netmask of the network interface used for Art-Net traffic.
///
/// Enumerating interfaces is the host application's job; the master only consumes
/// the result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// The interface's own address.
    pub address: IpAddress,
    /// The interface's subnet mask.
    pub netmask: IpAddress,
}

impl InterfaceInfo {
    /// The directed broadcast address reaching every listener on this interface's
    /// subnet.
    pub fn directed_broadcast(&self) -> IpAddress {
        self.address.directed_broadcast(self.netmask)
    }
}

/// A cached outbound UDP connection.
struct Connection {
    target: SocketAddr,
    socket: UdpSocket,
}

/// Builds and transmits Art-Net packets and collects discovery replies.
pub struct ArtNetMaster {
    data_connection: Option<Connection>,
    poll_connection: Option<Connection>,
    nodes: Arc<Mutex<Vec<NodeInfo>>>,
    listener: Option<Listener>,
    listen_port: u16,
    poll_window: Duration,
}

impl Default for ArtNetMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtNetMaster {
    /// Creates a master listening for replies on the standard Art-Net port. No
    /// sockets are opened until the first send or poll.
    pub fn new() -> Self {
        Self::with_listen_port(ARTNET_PORT)
    }

    /// Creates a master whose inbound listener binds the given port instead of the
    /// standard one. Port 0 picks an ephemeral port.
    pub fn with_listen_port(listen_port: u16) -> Self {
        Self {
            data_connection: None,
            poll_connection: None,
            nodes: Arc::new(Mutex::new(Vec::new())),
            listener: None,
            listen_port,
            poll_window: DEFAULT_POLL_WINDOW,
        }
    }

    /// Changes how long [Self::collect_nodes] waits for replies.
    pub fn set_poll_window(&mut self, window: Duration) {
        self.poll_window = window;
    }

    /// Sends one universe of DMX data carrying the given color to the fixture at
    /// `ip`, addressed by `net` and `sub_net`.
    ///
    /// The 3 or 4 channel values produced by the assignment are tiled across the
    /// whole 512 channel frame, so every fixture patched at any multiple of the
    /// channel count shows the color.
    ///
    /// # Errors
    /// Bind: no outbound socket could be created. Individual send failures are
    /// logged, not returned.
    pub fn send_color(
        &mut self,
        ip: IpAddress,
        net: Net,
        sub_net: u8,
        color: &Color,
        assignment: &ChannelAssignment,
    ) -> ArtNetResult<()> {
        let target = SocketAddr::new(Ipv4Addr::from(ip).into(), ARTNET_PORT);
        let connection = prepare(&mut self.data_connection, target)?;

        let values = assignment.channel_values(color);
        let packet = ArtDmx {
            net,
            sub_net,
            data: tile_frame(&values),
        };

        send(connection, &packet.pack());
        Ok(())
    }

    /// Sends an ArtAddress packet programming the node at `host`.
    ///
    /// # Errors
    /// Bind: no outbound socket could be created. Individual send failures are
    /// logged, not returned.
    pub fn send_address_packet(&mut self, host: IpAddress, parameters: &AddressParameters) -> ArtNetResult<()> {
        let target = SocketAddr::new(Ipv4Addr::from(host).into(), ARTNET_PORT);
        let connection = prepare(&mut self.data_connection, target)?;

        let packet = ArtAddress {
            parameters: parameters.clone(),
        };

        send(connection, &packet.pack());
        Ok(())
    }

    /// Starts a discovery cycle: clears the node collection, starts the inbound
    /// listener if necessary and broadcasts an ArtPoll on the interface's subnet.
    ///
    /// Returns immediately; replies accumulate in [Self::nodes] as they arrive.
    ///
    /// # Errors
    /// Bind: the listener or the outbound socket could not be bound.
    pub fn poll_nodes(&mut self, interface: InterfaceInfo) -> ArtNetResult<()> {
        match self.nodes.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }

        if self.listener.is_none() {
            self.listener = Some(Listener::spawn(self.listen_port, Arc::clone(&self.nodes))?);
        }

        let broadcast = interface.directed_broadcast();
        debug!(%broadcast, "polling nodes");

        let target = SocketAddr::new(Ipv4Addr::from(broadcast).into(), ARTNET_PORT);
        let connection = prepare(&mut self.poll_connection, target)?;

        send(connection, &ArtPoll.pack());
        Ok(())
    }

    /// Runs one bounded discovery cycle: polls, waits for the poll window to elapse
    /// and returns a snapshot of every reply received.
    ///
    /// # Errors
    /// Bind: the listener or the outbound socket could not be bound.
    pub fn collect_nodes(&mut self, interface: InterfaceInfo) -> ArtNetResult<Vec<NodeInfo>> {
        self.poll_nodes(interface)?;
        thread::sleep(self.poll_window);
        Ok(self.nodes())
    }

    /// A snapshot of the nodes discovered since the last [Self::poll_nodes].
    ///
    /// Every successfully parsed reply appears here; repeated replies from the same
    /// physical node are not deduplicated.
    pub fn nodes(&self) -> Vec<NodeInfo> {
        match self.nodes.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The local address of the inbound listener, once it has been started by a poll.
    pub fn listen_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().map(|listener| listener.local_addr)
    }
}

/// Returns the cached connection if it already points at `target`, otherwise opens a
/// fresh socket and replaces the cache. The key is the explicit `(host, port)` pair.
fn prepare(slot: &mut Option<Connection>, target: SocketAddr) -> Result<&Connection, Error> {
    let connection = match slot.take() {
        Some(connection) if connection.target == target => connection,
        _ => {
            trace!(%target, "opening outbound connection");
            Connection {
                target,
                socket: outbound_socket().map_err(Error::Bind)?,
            }
        }
    };

    Ok(slot.insert(connection))
}

/// Fire-and-forget datagram send; failures are logged only.
fn send(connection: &Connection, content: &[u8]) {
    match connection.socket.send_to(content, connection.target) {
        Ok(len) => trace!(addr = %connection.target, len, "sent datagram"),
        Err(error) => warn!(addr = %connection.target, %error, "send failed"),
    }
}

fn outbound_socket() -> io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_broadcast(true)?;
    socket.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)).into())?;
    Ok(socket.into())
}

fn listen_socket(port: u16) -> io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    // A finite timeout lets the listener thread notice the shutdown flag.
    socket.set_read_timeout(Some(RECV_POLL_INTERVAL))?;
    socket.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)).into())?;
    Ok(socket.into())
}

/// Background receiver for ArtPollReply datagrams.
///
/// Joined on drop, so dropping the master never leaks the thread or its socket.
struct Listener {
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Listener {
    fn spawn(port: u16, nodes: Arc<Mutex<Vec<NodeInfo>>>) -> Result<Self, Error> {
        let socket = listen_socket(port).map_err(Error::Bind)?;
        let local_addr = socket.local_addr().map_err(Error::Bind)?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = thread::Builder::new()
            .name("artnet-listener".into())
            .spawn(move || listen_loop(&socket, &nodes, &flag))
            .map_err(Error::Io)?;

        Ok(Self {
            local_addr,
            shutdown,
            handle: Some(handle),
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn listen_loop(socket: &UdpSocket, nodes: &Mutex<Vec<NodeInfo>>, shutdown: &AtomicBool) {
    let mut buf = [0u8; 1024];

    while !shutdown.load(Ordering::Relaxed) {
        let (len, from) = match socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(error) if matches!(error.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => continue,
            Err(error) => {
                warn!(%error, "receive failed");
                continue;
            }
        };

        if len == 0 {
            continue;
        }

        // The Art-Net port carries unrelated traffic, including our own ArtPoll
        // broadcast; anything that is not a poll reply is dropped here.
        match NodeInfo::parse(&buf[..len]) {
            Ok(node) => {
                debug!(%from, short_name = %node.short_name, "discovered node");
                match nodes.lock() {
                    Ok(mut guard) => guard.push(node),
                    Err(poisoned) => poisoned.into_inner().push(node),
                }
            }
            Err(error) => debug!(%from, %error, "dropping datagram"),
        }
    }
}

/// Repeats the per-fixture channel values across a full universe of data.
fn tile_frame(values: &[u8]) -> [u8; DMX_CHANNEL_COUNT] {
    debug_assert!(!values.is_empty());
    core::array::from_fn(|i| values[i % values.len()])
}
