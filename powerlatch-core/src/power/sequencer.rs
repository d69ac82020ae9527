//! Power sequencer
//!
//! The only place where the shutdown flags change, and always together
//! with the matching latch-line action.

use powerlatch_hal::RetainedWord;

use super::flags::{ShutdownReason, ShutdownRequest};
use super::store::PowerState;
use crate::traits::{AuxiliaryShutdown, ModulePower, PowerRailControl};

/// Power sequencer
///
/// Owns the latch rail, the retained flags, the auxiliary consumers that
/// must be quiesced before power-off, and the module power switches.
/// Operations take `&mut self`, so a single owner serializes them.
///
/// The reset path builds a sequencer with no auxiliaries or modules
/// (`()`), because it only ever powers on.
pub struct PowerSequencer<R, W, A = (), M = ()> {
    pub(crate) rail: R,
    pub(crate) state: PowerState<W>,
    aux: A,
    modules: M,
}

impl<R, W> PowerSequencer<R, W>
where
    R: PowerRailControl,
    W: RetainedWord,
{
    /// Create a sequencer for the reset path
    pub fn new(rail: R, state: PowerState<W>) -> Self {
        Self::with_peripherals(rail, state, (), ())
    }
}

impl<R, W, A, M> PowerSequencer<R, W, A, M>
where
    R: PowerRailControl,
    W: RetainedWord,
    A: AuxiliaryShutdown,
    M: ModulePower,
{
    /// Create a sequencer that also owns auxiliary consumers and module power
    ///
    /// `aux` is shut down in its own order on power-off; use a tuple
    /// `(audio, haptic)` to get audio first.
    pub fn with_peripherals(rail: R, state: PowerState<W>, aux: A, modules: M) -> Self {
        Self {
            rail,
            state,
            aux,
            modules,
        }
    }

    /// Cold-start initialization
    ///
    /// Configures the rail and button pins, returns the auxiliary lines to
    /// idle, forces the module bays off, then powers on.
    pub fn init(&mut self) {
        self.rail.configure();
        self.aux.idle();
        self.modules.power_off_modules();
        self.power_on();
    }

    /// Latch the supply on and mark the session dirty
    ///
    /// The dirty mark stays in place until [`power_off`](Self::power_off)
    /// replaces it, so any reset in between is seen as unintended.
    pub fn power_on(&mut self) {
        self.rail.energize();
        self.state.set_shutdown_request(ShutdownRequest::None);
        self.state.set_shutdown_reason(ShutdownReason::Dirty);
    }

    /// Intentional power-off
    ///
    /// Order matters: auxiliary consumers first, then both flags, then the
    /// rail. Nothing after the rail release is guaranteed to execute.
    pub fn power_off(&mut self) {
        self.aux.shutdown();

        self.state.set_shutdown_request(ShutdownRequest::Requested);
        self.state.set_shutdown_reason(ShutdownReason::NormalPowerOff);

        self.rail.release();
    }

    /// Check whether the power button is pressed
    pub fn is_button_pressed(&self) -> bool {
        self.rail.is_button_pressed()
    }

    /// Read access to the retained flags
    pub fn state(&self) -> &PowerState<W> {
        &self.state
    }

    /// Read access to the rail
    pub fn rail(&self) -> &R {
        &self.rail
    }

    /// Give up the sequencer, keeping the retained flags
    pub fn into_state(self) -> PowerState<W> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAux, MockModules, MockRail, Op, Trace, TracedWord};
    use crate::power::flags::{
        DIRTY_SHUTDOWN, NORMAL_POWER_OFF, NO_SHUTDOWN_REQUEST, SHUTDOWN_REQUEST,
    };
    use crate::power::flags::PowerupReason;
    use crate::power::store::StateSnapshot;

    #[test]
    fn test_power_on_sets_flags_and_rail() {
        let trace = Trace::new();
        let mut seq = PowerSequencer::new(MockRail::new(&trace), PowerState::from_words(0, 0, 0));

        seq.power_on();

        assert!(seq.rail().is_energized());
        assert_eq!(seq.state().shutdown_request(), ShutdownRequest::None);
        assert_eq!(seq.state().shutdown_reason(), Some(ShutdownReason::Dirty));
    }

    #[test]
    fn test_power_on_leaves_powerup_reason() {
        let trace = Trace::new();
        let state = PowerState::from_words(SHUTDOWN_REQUEST, NORMAL_POWER_OFF, 0xAAAA_5555);
        let mut seq = PowerSequencer::new(MockRail::new(&trace), state);

        seq.power_on();

        assert_eq!(seq.state().snapshot().powerup_reason, 0xAAAA_5555);
    }

    #[test]
    fn test_power_on_idempotent() {
        let trace = Trace::new();
        let mut seq = PowerSequencer::new(MockRail::new(&trace), PowerState::from_words(1, 2, 3));

        seq.power_on();
        let once = seq.state().snapshot();
        seq.power_on();

        assert_eq!(seq.state().snapshot(), once);
        assert_eq!(
            once,
            StateSnapshot {
                shutdown_request: NO_SHUTDOWN_REQUEST,
                shutdown_reason: DIRTY_SHUTDOWN,
                powerup_reason: 3,
            }
        );
        assert!(seq.rail().is_energized());
    }

    #[test]
    fn test_power_off_flags_unconditional() {
        for (request, reason) in [(0, 0), (SHUTDOWN_REQUEST, DIRTY_SHUTDOWN), (u32::MAX, 7)] {
            let trace = Trace::new();
            let state = PowerState::from_words(request, reason, 0);
            let mut seq = PowerSequencer::new(MockRail::new(&trace), state);

            seq.power_off();

            assert_eq!(seq.state().shutdown_request(), ShutdownRequest::Requested);
            assert_eq!(seq.state().shutdown_reason(), Some(ShutdownReason::NormalPowerOff));
            assert!(!seq.rail().is_energized());
        }
    }

    #[test]
    fn test_power_off_ordering() {
        let trace = Trace::new();
        let state = PowerState::new(
            TracedWord::new(&trace, 0),
            TracedWord::new(&trace, 0),
            TracedWord::new(&trace, 0),
        );
        let aux = (MockAux::new(&trace, "audio"), MockAux::new(&trace, "haptic"));
        let mut seq =
            PowerSequencer::with_peripherals(MockRail::new(&trace), state, aux, MockModules::new(&trace));

        seq.power_on();
        trace.clear();
        seq.power_off();

        assert_eq!(
            trace.ops().as_slice(),
            &[
                Op::Aux("audio"),
                Op::Aux("haptic"),
                Op::Write(SHUTDOWN_REQUEST),
                Op::Write(NORMAL_POWER_OFF),
                Op::Release,
            ]
        );
    }

    #[test]
    fn test_init_configures_then_powers_on() {
        let trace = Trace::new();
        let mut seq = PowerSequencer::with_peripherals(
            MockRail::new(&trace),
            PowerState::from_words(SHUTDOWN_REQUEST, NORMAL_POWER_OFF, 0),
            (),
            MockModules::new(&trace),
        );

        seq.init();

        assert_eq!(
            trace.ops().as_slice(),
            &[Op::Configure, Op::ModulesOff, Op::Energize]
        );
        assert!(seq.rail().output_configured);
        assert_eq!(seq.state().shutdown_request(), ShutdownRequest::None);
        assert_eq!(seq.state().shutdown_reason(), Some(ShutdownReason::Dirty));
    }

    #[test]
    fn test_button_sense_independent_of_rail() {
        let trace = Trace::new();
        let mut rail = MockRail::new(&trace);
        rail.button_pressed = true;
        let mut seq = PowerSequencer::new(rail, PowerState::from_words(0, 0, 0));

        assert!(seq.is_button_pressed());
        seq.power_on();
        assert!(seq.is_button_pressed());
        seq.power_off();
        assert!(seq.is_button_pressed());
        assert_eq!(trace.position(Op::Configure), None);
    }

    #[test]
    fn test_power_cycle_keeps_powerup_reason() {
        let trace = Trace::new();
        let state = PowerState::from_words(0, 0, DIRTY_SHUTDOWN);
        let mut seq = PowerSequencer::with_peripherals(
            MockRail::new(&trace),
            state,
            MockAux::new(&trace, "audio"),
            MockModules::new(&trace),
        );

        seq.init();
        seq.power_off();
        seq.power_on();

        assert_eq!(seq.state().powerup_reason(), PowerupReason::Dirty);
        assert_eq!(seq.state().snapshot().powerup_reason, DIRTY_SHUTDOWN);
    }

    #[test]
    fn test_init_idles_aux_before_modules() {
        let trace = Trace::new();
        let aux = (MockAux::new(&trace, "audio"), MockAux::new(&trace, "haptic"));
        let mut seq = PowerSequencer::with_peripherals(
            MockRail::new(&trace),
            PowerState::from_words(0, 0, 0),
            aux,
            MockModules::new(&trace),
        );

        seq.init();

        assert_eq!(
            trace.ops().as_slice(),
            &[
                Op::Configure,
                Op::AuxIdle("audio"),
                Op::AuxIdle("haptic"),
                Op::ModulesOff,
                Op::Energize,
            ]
        );
        assert_eq!(trace.position(Op::Aux("audio")), None);
    }
}
