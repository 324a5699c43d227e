use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The stream construction and smashing draw from. Equal seeds replay
/// identical boards.
pub fn board_rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use super::board_rng;

    #[test]
    fn equal_seeds_replay() {
        let mut a = board_rng(4);
        let mut b = board_rng(4);
        for _ in 0..32 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}
