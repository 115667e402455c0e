//! Sample employees used when storage holds nothing usable.

use crate::domain::{Employee, EmployeeId};

const SEED: [(u64, &str, &str, &str, &str); 6] = [
    (1, "Sarah Johnson", "Software Engineer", "sarah.johnson@company.com", "+1 (555) 123-4567"),
    (2, "Michael Chen", "Product Manager", "michael.chen@company.com", "+1 (555) 234-5678"),
    (3, "Emily Rodriguez", "UX Designer", "emily.rodriguez@company.com", "+1 (555) 345-6789"),
    (4, "David Kim", "DevOps Engineer", "david.kim@company.com", "+1 (555) 456-7890"),
    (5, "Jessica Williams", "Marketing Manager", "jessica.williams@company.com", "+1 (555) 567-8901"),
    (6, "Robert Taylor", "Senior Developer", "robert.taylor@company.com", "+1 (555) 678-9012"),
];

pub fn seed_employees() -> Vec<Employee> {
    SEED.iter()
        .map(|&(id, name, role, email, phone)| Employee {
            id: EmployeeId(id),
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        })
        .collect()
}
