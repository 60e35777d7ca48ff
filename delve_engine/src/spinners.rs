//! Random selection of narrative text.
use gametools::{Spinner, Wedge};

pub trait SpinnerExt: Sized {
    /// Build an evenly weighted spinner over `lines`, skipping blank ones.
    /// Returns `None` if nothing usable is left.
    fn from_lines(lines: &[String]) -> Option<Self>;
}
impl SpinnerExt for Spinner<String> {
    fn from_lines(lines: &[String]) -> Option<Self> {
        let wedges = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| Wedge::new(line.to_string()))
            .collect::<Vec<_>>();
        if wedges.is_empty() { None } else { Some(Spinner::new(wedges)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_yield_no_spinner() {
        assert!(Spinner::<String>::from_lines(&[]).is_none());
        assert!(Spinner::<String>::from_lines(&["  ".to_string()]).is_none());
    }

    #[test]
    fn spins_only_supplied_lines() {
        let lines = vec!["owl hoots".to_string(), String::new(), "wind howls".to_string()];
        let spinner = Spinner::<String>::from_lines(&lines).unwrap();
        for _ in 0..20 {
            let line = spinner.spin().unwrap();
            assert!(line == "owl hoots" || line == "wind howls");
        }
    }
}
