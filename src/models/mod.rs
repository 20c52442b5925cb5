pub mod department;
pub mod doctor;

pub use department::Department;
pub use doctor::Doctor;
