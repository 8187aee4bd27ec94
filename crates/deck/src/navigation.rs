use std::fmt;

/// Cyclic cursor over a deck. There are no terminal states: both ends wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut nav = Self::new(len);
        nav.jump_to(index);
        nav
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn retreat(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = index % self.len;
        self.current
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    /// The `current / total` indicator; the cover is not counted in `total`.
    pub fn position(&self) -> Position {
        Position {
            current: self.current,
            total: self.len - 1,
        }
    }

    /// One flag per slide, set for the active one.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |index| index == self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}
