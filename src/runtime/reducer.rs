use crate::runtime::effect::Effect;
use crate::runtime::event::PickerEvent;
use crate::state::PickerState;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut PickerState, event: PickerEvent) -> Vec<Effect> {
        let was_open = state.is_open;

        let mut effects = match event {
            PickerEvent::TextInput(raw) => vec![Effect::Emit(state.apply_text(&raw))],
            PickerEvent::DaySelected(date) => vec![Effect::Emit(state.select_day(date))],
            PickerEvent::ToggleOpen => {
                state.toggle_open();
                vec![]
            }
            PickerEvent::OutsideInteraction => {
                state.close();
                vec![]
            }
            PickerEvent::PreviousMonth => {
                state.navigate(-1);
                vec![]
            }
            PickerEvent::NextMonth => {
                state.navigate(1);
                vec![]
            }
        };

        match (was_open, state.is_open) {
            (false, true) => effects.push(Effect::Opened),
            (true, false) => effects.push(Effect::Closed),
            _ => {}
        }

        effects
    }
}
