//! Collection of simplified mpi routines
use crate::descriptor::BlockDescriptor;
use crate::error::{Result, TransformError};
use crate::types::Scalar;
use ::mpi::datatype::{UserDatatype, View};
use ::mpi::environment::Universe;
use ::mpi::point_to_point::send_receive_into;
use ::mpi::topology::Communicator;
use ::mpi::traits::Equivalence;
use ::mpi::Count;

fn to_count(n: usize) -> Result<Count> {
    Count::try_from(n)
        .map_err(|_| TransformError::Transport(format!("{} does not fit into an mpi count", n)))
}

fn to_counts(values: &[usize]) -> Result<Vec<Count>> {
    values.iter().map(|&v| to_count(v)).collect()
}

/// Send `send` to this rank through the indexed type of `descriptor`
/// and receive the selected elements contiguously.
///
/// Sender and receiver are the calling process.
pub fn send_recv_indexed<T: Scalar + Equivalence>(
    universe: &Universe,
    send: &[T],
    descriptor: &BlockDescriptor,
) -> Result<Vec<T>> {
    if send.len() != descriptor.extent() {
        return Err(TransformError::ShapeMismatch {
            expected: descriptor.extent(),
            found: send.len(),
        });
    }
    let world = universe.world();
    let this = world.this_process();
    let indexed = UserDatatype::indexed(
        &to_counts(&descriptor.block_lengths())?,
        &to_counts(&descriptor.displacements())?,
        &T::equivalent_datatype(),
    );
    let mut recv = vec![T::zero(); descriptor.selected_len()];
    // one element of `indexed` spans the whole send buffer
    let view = unsafe { View::with_count_and_datatype(send, 1, &indexed) };
    let status = send_receive_into(&view, &this, &mut recv[..], &this);
    let received = status.count(T::equivalent_datatype());
    if received != to_count(recv.len())? {
        return Err(TransformError::Transport(format!(
            "rank {} received {} elements, expected {}",
            world.rank(),
            received,
            recv.len()
        )));
    }
    Ok(recv)
}
