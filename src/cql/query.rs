use std::io::Read;

use log::debug;

use crate::core::CQLError;

/// Consume the queries stream.
///
/// Query statements are not interpreted yet, so nothing is produced beyond
/// making sure the stream can be read.
pub fn parse_queries<R: Read>(mut reader: R) -> Result<(), CQLError> {
    let mut bytes = vec![];
    let len = reader.read_to_end(&mut bytes)?;
    debug!("Read {} bytes of queries, skipping", len);

    Ok(())
}
