use slot_bitmap::{SlotBitmap, SlotBitmapError, byte_len};

const SLOTS: usize = 20;
const RECORD_LEN: usize = 4;
const HEADER_LEN: usize = byte_len(SLOTS);

struct Page {
    data: [u8; HEADER_LEN + SLOTS * RECORD_LEN],
}

impl Page {
    fn slots(&mut self) -> SlotBitmap<'_> {
        SlotBitmap::new(SLOTS, &mut self.data[..HEADER_LEN])
    }

    fn insert(&mut self, record: [u8; RECORD_LEN]) -> Result<usize, SlotBitmapError> {
        let slot = self.slots().claim_first_unset()?;
        let start = HEADER_LEN + slot * RECORD_LEN;
        self.data[start..start + RECORD_LEN].copy_from_slice(&record);
        Ok(slot)
    }
}

fn main() {
    let mut page = Page {
        data: [0; HEADER_LEN + SLOTS * RECORD_LEN],
    };
    for n in 0..SLOTS {
        assert_eq!(page.insert([n as u8; RECORD_LEN]), Ok(n));
    }
    assert!(page.insert([0; RECORD_LEN]).is_err());

    page.slots().unset(7).unwrap();
    assert_eq!(page.insert([0xEE; RECORD_LEN]), Ok(7));
    assert_eq!(&page.data[..HEADER_LEN], &[0xFF, 0xFF, 0x0F]);
}
