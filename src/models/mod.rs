pub mod bs;

pub use bs::implied::{implied_volatility, ImpliedVolConfig};
pub use bs::{bs_call_price, bs_put_price, norm_cdf, norm_pdf, VolSlice};
