//! The built-in hardware operations callable from Crumble programs.

/// A built-in function. The catalogue is closed; any other callee name is
/// rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `set_output(output, value)`
    SetOutput,
    /// `get_digital(output)`
    GetDigital,
    /// `get_analog(output)`
    GetAnalog,
    /// `set_motor_1(percent)`
    SetMotor1,
    /// `set_motor_2(percent)`
    SetMotor2,
    /// `set_servo(output, degrees)`
    SetServo,
    /// `set_sparkle(index, red, green, blue)`
    SetSparkle,
    /// `get_distance(trigger, echo)`
    GetDistance,
    /// `random(low, high)`
    Random,
    /// `wait(milliseconds)`
    Wait,
}

impl Builtin {
    pub const ALL: [Builtin; 10] = [
        Builtin::SetOutput,
        Builtin::GetDigital,
        Builtin::GetAnalog,
        Builtin::SetMotor1,
        Builtin::SetMotor2,
        Builtin::SetServo,
        Builtin::SetSparkle,
        Builtin::GetDistance,
        Builtin::Random,
        Builtin::Wait,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::SetOutput => "set_output",
            Builtin::GetDigital => "get_digital",
            Builtin::GetAnalog => "get_analog",
            Builtin::SetMotor1 => "set_motor_1",
            Builtin::SetMotor2 => "set_motor_2",
            Builtin::SetServo => "set_servo",
            Builtin::SetSparkle => "set_sparkle",
            Builtin::GetDistance => "get_distance",
            Builtin::Random => "random",
            Builtin::Wait => "wait",
        }
    }

    /// Number of positional arguments.
    pub fn arity(self) -> usize {
        match self {
            Builtin::GetDigital
            | Builtin::GetAnalog
            | Builtin::SetMotor1
            | Builtin::SetMotor2
            | Builtin::Wait => 1,
            Builtin::SetOutput | Builtin::SetServo | Builtin::GetDistance | Builtin::Random => 2,
            Builtin::SetSparkle => 4,
        }
    }
}
