// One-way latch: starts `Unseen`, flips to `Seen` once and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OneShot {
    #[default]
    Unseen,
    Seen,
}

impl OneShot {
    pub fn trigger(&mut self) -> bool {
        match self {
            OneShot::Unseen => {
                *self = OneShot::Seen;
                true
            }
            OneShot::Seen => false,
        }
    }

    pub fn is_seen(self) -> bool {
        self == OneShot::Seen
    }
}

pub type AnimationFlag = OneShot;

pub type CounterFlag = OneShot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_exactly_once() {
        let mut flag = OneShot::default();
        assert!(!flag.is_seen());
        assert!(flag.trigger());
        assert!(flag.is_seen());
        assert!(!flag.trigger());
        assert!(!flag.trigger());
        assert!(flag.is_seen());
    }
}
