//! Carriers of the flattened matrix
//!
//! A transport takes the full send buffer, applies the descriptor on the
//! send side and hands back the contiguous receive buffer. Exchanges are
//! synchronous: they return the complete buffer or fail.
use crate::descriptor::BlockDescriptor;
use crate::error::Result;
use crate::gather::gather;
use crate::types::Value;

/// Synchronous exchange of a flattened matrix
pub trait Transport {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Send `send` through `descriptor` and return what was received
    fn exchange(&self, send: &[Value], descriptor: &BlockDescriptor) -> Result<Vec<Value>>;
}

/// In-process exchange, simulated by [`gather`]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTransport;

impl Transport for LocalTransport {
    fn name(&self) -> &'static str {
        "local"
    }

    fn exchange(&self, send: &[Value], descriptor: &BlockDescriptor) -> Result<Vec<Value>> {
        let received = gather(send, descriptor)?;
        tracing::debug!(sent = send.len(), received = received.len(), "local exchange");
        Ok(received)
    }
}

/// Send-receive to the own rank with an mpi indexed datatype
#[cfg(feature = "mpi")]
pub struct MpiTransport {
    universe: crate::mpi::Universe,
}

#[cfg(feature = "mpi")]
impl MpiTransport {
    /// Initialize mpi, fails if it is already initialized
    pub fn initialize() -> Result<Self> {
        crate::mpi::initialize()
            .map(|universe| Self { universe })
            .ok_or_else(|| {
                crate::TransformError::Transport("mpi is already initialized".to_string())
            })
    }

    pub fn rank(&self) -> i32 {
        use crate::mpi::Communicator;
        self.universe.world().rank()
    }
}

#[cfg(feature = "mpi")]
impl Transport for MpiTransport {
    fn name(&self) -> &'static str {
        "mpi"
    }

    fn exchange(&self, send: &[Value], descriptor: &BlockDescriptor) -> Result<Vec<Value>> {
        let received = crate::mpi::send_recv_indexed(&self.universe, send, descriptor)?;
        tracing::debug!(
            rank = self.rank(),
            sent = send.len(),
            received = received.len(),
            "mpi exchange"
        );
        Ok(received)
    }
}
