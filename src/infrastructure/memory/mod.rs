pub mod funnel_repo;
