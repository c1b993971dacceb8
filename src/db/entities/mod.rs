pub mod students;
pub mod productions;
pub mod roles;
pub mod role_assignments;
pub mod crew_assignments;
pub mod team_members;
pub mod songs;
pub mod thanks;

pub use students::Entity as Students;
pub use productions::Entity as Productions;
pub use roles::Entity as Roles;
pub use role_assignments::Entity as RoleAssignments;
pub use crew_assignments::Entity as CrewAssignments;
pub use team_members::Entity as TeamMembers;
pub use songs::Entity as Songs;
pub use thanks::Entity as Thanks;
