pub mod a001_platform_order;
