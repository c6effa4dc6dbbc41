use crate::{Board, BOARD_SIZE};

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut cells = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                // Roughly half the cells stay empty; the rest get a
                // power of two between 2 and 2048.
                let roll = u8::arbitrary(g) % 24;
                if roll >= 12 {
                    *cell = 2u32 << (roll % 11);
                }
            }
        }
        Board::from_cells(cells)
    }
}
