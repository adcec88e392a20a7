use log::{LevelFilter, info};
use slot_bitmap::{SlotBitmap, byte_len};

const SLOTS: usize = 10;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let mut header = [0u8; byte_len(SLOTS)];
    let mut slots = SlotBitmap::new(SLOTS, &mut header);

    for idx in [0, 3, 6, 9] {
        slots.set(idx).unwrap();
    }
    info!("page header: {slots:?}");

    loop {
        match slots.claim_first_unset() {
            Ok(idx) => info!("placed record in slot {idx}"),
            Err(err) => {
                err.report();
                break;
            }
        }
    }

    if let Err(err) = slots.set(SLOTS) {
        err.report();
    }

    info!("raw header bytes: {:02x?}", slots.as_bytes());
}
