//! Poll, read and write against an in-memory card.
//!
//! Usage:
//!   RUST_LOG=libfelica=trace cargo run -p libfelica --example read_card

use anyhow::{Context, bail};
use libfelica::prelude::*;
use libfelica::test_support;

/// Answers Polling, Read and Write Without Encryption from a block array.
struct SimulatedCard {
    idm: [u8; 8],
    blocks: Vec<[u8; 16]>,
}

impl SimulatedCard {
    fn status_reply(&self, code: u8, status: [u8; 2]) -> Vec<u8> {
        test_support::reply(code, self.idm, &status)
    }
}

impl Transport for SimulatedCard {
    fn transceive(
        &mut self,
        request: &[u8],
        _timeout_ms: u64,
    ) -> std::result::Result<Vec<u8>, TransportError> {
        let packet = CommandPacket::from_bytes(request)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        let data = packet.data();
        match packet.command_code() {
            0x00 => Ok(test_support::polling_reply(self.idm, [0x01, 0x20, 0, 0, 0, 0, 0, 0])),
            0x06 => {
                // [1, svc lo, svc hi, 1, 0x80, addr]
                match self.blocks.get(data[5] as usize) {
                    Some(block) => {
                        let mut out = vec![0x00, 0x00, 0x01];
                        out.extend_from_slice(block);
                        Ok(test_support::reply(0x07, self.idm, &out))
                    }
                    None => Ok(self.status_reply(0x07, [0xFF, 0xA8])),
                }
            }
            0x08 => {
                let addr = data[5] as usize;
                match self.blocks.get_mut(addr) {
                    Some(block) => {
                        block.copy_from_slice(&data[6..22]);
                        Ok(self.status_reply(0x09, [0x00, 0x00]))
                    }
                    None => Ok(self.status_reply(0x09, [0xFF, 0xA8])),
                }
            }
            _ => Err(TransportError::NoResponse),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let card = SimulatedCard {
        idm: [0x01, 0x2e, 0x4c, 0xd1, 0x8a, 0x11, 0x52, 0x07],
        blocks: vec![*b"hello, felica!!!"; 4],
    };
    let mut session = SessionBuilder::new().with_transport(card).build()?;

    let info = session.polling(SystemCode::ANY).context("polling")?;
    println!("{}", info);

    let service = ServiceCode::new(0x0009);
    let block = session
        .read_without_encryption(service, 0)?
        .into_result()
        .context("read block 0")?;
    println!("block 0: {} {:?}", block.to_hex(), block.to_ascii_safe());

    let new_block = Block::from_bytes(*b"written by demo.");
    match session.write_without_encryption(service, 1, &new_block)? {
        CardOutcome::Success(()) => println!("block 1 written"),
        CardOutcome::CardError(status) => bail!("write refused: {}", status),
    }

    match session.read_without_encryption(service, 9)? {
        CardOutcome::Success(b) => println!("block 9: {}", b),
        CardOutcome::CardError(status) => println!("block 9 unavailable: {}", status),
    }

    Ok(())
}
