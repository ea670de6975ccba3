/// Entries of the main menu, in the order they are numbered on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MenuOption {
    Play,
    Add,
    Remove,
    ViewLibrary,
    ViewByPlayCount,
    Exit,
}

impl MenuOption {
    pub(crate) const ALL: [MenuOption; 6] = [
        MenuOption::Play,
        MenuOption::Add,
        MenuOption::Remove,
        MenuOption::ViewLibrary,
        MenuOption::ViewByPlayCount,
        MenuOption::Exit,
    ];

    /// Map raw user input onto a menu entry. Anything that is not one of the
    /// listed numbers is `None`.
    pub(crate) fn from_selection(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub(crate) fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map_or(0, |index| index + 1)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuOption::Play => "Play song",
            MenuOption::Add => "Add a new song to your library",
            MenuOption::Remove => "Remove a song from your library",
            MenuOption::ViewLibrary => "View your library",
            MenuOption::ViewByPlayCount => "View songs by play count",
            MenuOption::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_options() {
        assert_eq!(MenuOption::from_selection("1"), Some(MenuOption::Play));
        assert_eq!(MenuOption::from_selection(" 5 \n"), Some(MenuOption::ViewByPlayCount));
        assert_eq!(MenuOption::from_selection("6"), Some(MenuOption::Exit));
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        for input in ["0", "7", "-1", "", "two", "1.5"] {
            assert_eq!(MenuOption::from_selection(input), None, "input {input:?}");
        }
    }

    #[test]
    fn numbering_round_trips() {
        for option in MenuOption::ALL {
            let selection = option.number().to_string();
            assert_eq!(MenuOption::from_selection(&selection), Some(option));
        }
    }
}
