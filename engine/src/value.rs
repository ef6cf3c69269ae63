pub trait Value: Clone {
    /// Players are numbered from 1.
    fn get_value_for_player(&self, player: usize) -> f32;
}
