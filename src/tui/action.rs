use crate::store::Direction;

/// Things a key press can ask the TUI to do. Turned into store intents by
/// `AppState::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveDay(i64),
    Navigate(Direction),
    OpenForm,
    ToggleDetails,
    ToggleFilter,
    CycleFilter,
    ToggleFocus,
    ListNext,
    ListPrevious,
    EditSelected,
    DeleteSelected,
    InputChar(char),
    InputBackspace,
    InputLeft,
    InputRight,
    ToggleCategory,
    Submit,
    Cancel,
    Quit,
}
