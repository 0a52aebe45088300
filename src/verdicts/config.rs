pub mod api {
    pub const PROBLEM_SET: &str = "https://codeforces.com/api/problemset.problems";
    pub const CONTEST_LIST: &str = "https://codeforces.com/api/contest.list";
    pub const USER_STATUS: &str = "https://codeforces.com/api/user.status";
}
pub mod table {
    pub const CONTEST_URL_BASE: &str = "https://codeforces.com/contest";
    // Ids above this are gym-style rounds and never rendered.
    pub const CONTEST_ID_CEILING: u32 = 100_000;
}
