pub mod openai;
pub mod payment;
pub mod upi;
