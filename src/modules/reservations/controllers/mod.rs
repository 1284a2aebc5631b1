pub mod reservation_controller;
