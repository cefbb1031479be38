use crate::model::dimensions::DIM_COUNT;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub color: String,
    pub means: [f64; DIM_COUNT],
    pub members: usize,
}

/// Per-color mean profiles, ordered by color label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    pub profiles: Vec<Profile>,
}

impl ProfileSet {
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.color.as_str())
    }
}
