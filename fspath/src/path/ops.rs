//! The `+` operator, an alias for [`Path::join`].

use std::ops::Add;

use super::types::Path;

impl Add<Path> for Path {
    type Output = Path;

    fn add(self, rhs: Path) -> Path {
        self.join(rhs)
    }
}

impl Add<&Path> for Path {
    type Output = Path;

    fn add(self, rhs: &Path) -> Path {
        self.join(rhs)
    }
}

impl Add<&str> for Path {
    type Output = Path;

    fn add(self, rhs: &str) -> Path {
        self.join(rhs)
    }
}

impl Add<Path> for &Path {
    type Output = Path;

    fn add(self, rhs: Path) -> Path {
        self.join(rhs)
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    fn add(self, rhs: &Path) -> Path {
        self.join(rhs)
    }
}

impl Add<&str> for &Path {
    type Output = Path;

    fn add(self, rhs: &str) -> Path {
        self.join(rhs)
    }
}
