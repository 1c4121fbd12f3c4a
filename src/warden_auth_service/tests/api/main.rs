mod helpers;
mod refresh;
mod sign_in;
mod sign_out;
mod sign_up;
mod withdraw_member;
