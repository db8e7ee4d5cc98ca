/// Display address of a place as returned by the directory API:
/// an ordered list of lines, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub lines: Vec<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn single_line(&self) -> String {
        self.lines.join(", ")
    }
}

impl From<Vec<String>> for Address {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert!(Address::from(vec![" ".to_string()]).is_empty());
        assert!(!Address::from(vec!["1. Main St".to_string()]).is_empty());
    }

    #[test]
    fn join_lines() {
        let addr = Address::from(vec!["52 Powell St".to_string(), "Vancouver, BC".to_string()]);
        assert_eq!(addr.single_line(), "52 Powell St, Vancouver, BC");
    }
}
