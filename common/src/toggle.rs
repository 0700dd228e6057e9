pub trait Toggle {
    fn toggle(&mut self) -> bool;
}

impl Toggle for bool {
    fn toggle(&mut self) -> bool {
        let was = *self;
        *self = !was;
        was
    }
}
