/// Number of trait axes shared by person and job data.
pub const DIM_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Red,
    Blue,
    White,
    Yellow,
}

impl Dimension {
    pub const ALL: [Dimension; DIM_COUNT] = [
        Dimension::Red,
        Dimension::Blue,
        Dimension::White,
        Dimension::Yellow,
    ];

    pub fn index(self) -> usize {
        match self {
            Dimension::Red => 0,
            Dimension::Blue => 1,
            Dimension::White => 2,
            Dimension::Yellow => 3,
        }
    }

    /// Header of this axis in the person CSV.
    pub fn person_column(self) -> &'static str {
        match self {
            Dimension::Red => "RED Score",
            Dimension::Blue => "BLUE Score",
            Dimension::White => "WHITE Score",
            Dimension::Yellow => "YELLOW Score",
        }
    }

    /// Header of this axis in the job workbook.
    pub fn job_column(self) -> &'static str {
        match self {
            Dimension::Red => "Red_Score",
            Dimension::Blue => "Blue_Score",
            Dimension::White => "White_Score",
            Dimension::Yellow => "Yellow_Score",
        }
    }

    /// Label used in burnout reasons: the first word of the person column.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Red => "RED",
            Dimension::Blue => "BLUE",
            Dimension::White => "WHITE",
            Dimension::Yellow => "YELLOW",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
