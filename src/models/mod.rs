pub mod bs;
pub mod normal;

pub use bs::{bs_call_price, bs_price, bs_put_price, put_call_parity_gap};
pub use normal::{cum_dist_normal, norm_pdf};
