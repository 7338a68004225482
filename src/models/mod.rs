pub mod friend_requests;
pub mod users;

pub use friend_requests::{FriendRequestRow, PendingRequestRow};
pub use users::UsersRow;
