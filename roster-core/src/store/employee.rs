//! Employee Store

use shared::models::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use shared::util::snowflake_id;
use shared::{AppError, AppResult};

/// In-memory, insertion-ordered employee collection.
///
/// Owns record identity: ids are generated here and never reused while the
/// record is alive, so no two records ever share an id.
#[derive(Debug, Default, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.position(id).is_some()
    }

    /// Find employee by id
    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Create a new employee at the end of the collection, returning its id
    pub fn add(&mut self, data: EmployeeCreate) -> EmployeeId {
        let id = self.next_id();
        self.employees.push(Employee::from_create(id, data));
        tracing::debug!(id, total = self.employees.len(), "employee added");
        id
    }

    /// Merge the given fields into an existing employee
    pub fn update(&mut self, id: EmployeeId, data: EmployeeUpdate) -> AppResult<&Employee> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::employee_not_found(id))?;
        let employee = &mut self.employees[idx];
        employee.apply(data);
        tracing::debug!(id, "employee updated");
        Ok(employee)
    }

    /// Hard delete an employee. Returns `false` if the id was not present.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.employees.remove(idx);
                tracing::debug!(id, total = self.employees.len(), "employee removed");
                true
            }
            None => false,
        }
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }

    fn next_id(&self) -> EmployeeId {
        loop {
            let id = snowflake_id();
            if !self.contains(id) {
                return id;
            }
        }
    }
}
