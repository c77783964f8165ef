//! Feature: Mpi exchange through an indexed datatype
#![cfg(feature = "mpi")]
pub mod functions;
pub use ::mpi::environment::Universe;
pub use ::mpi::initialize;
pub use ::mpi::topology::Communicator;
pub use ::mpi::traits::Equivalence;
pub use functions::send_recv_indexed;
