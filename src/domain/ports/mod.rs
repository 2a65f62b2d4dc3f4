pub mod funnel_repository;
