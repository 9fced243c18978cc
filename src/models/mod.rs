pub mod employee;
pub mod pair;
pub mod schedule;

pub use employee::{Employee, NewEmployeeRequest};
pub use pair::{NewPairRequest, Pair};
pub use schedule::{
    AssignEmployeeRequest, AssignPairRequest, DaySchedule, Role, Shift, ShiftAssignments,
    ShiftSlots, StepMonthRequest, YearMonth, YearMonthRepr,
};
