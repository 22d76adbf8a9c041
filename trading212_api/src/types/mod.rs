mod position;
pub use self::position::Position;

mod order;
pub use self::order::{Order, OrderStrategy, OrderType};

mod pie;
pub use self::pie::{DividendDetails, Pie, PieResult};

mod account;
pub use self::account::{AccountInfo, AccountSummary, Cash, SummaryCash, SummaryInvestments};

mod metadata;
pub use self::metadata::{Exchange, Instrument, TimeEvent, WorkingSchedule};
