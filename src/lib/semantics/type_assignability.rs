use crate::semantics::*;
use crate::*;

#[derive(Clone, Debug)]
pub enum TypeAssignability {
    Valid,
    Invalid {
        assignee: TypeExpression,
        assigned: TypeExpression,
        invariant: bool,
        because: Vec<TypeAssignability>,
    },
}

impl TypeAssignability {
    pub fn is_valid(&self) -> bool {
        if let TypeAssignability::Valid = self {
            true
        } else {
            false
        }
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

fn format_invalid_type_assignability(
    f: &mut fmt::Formatter,
    indentation: usize,
    assignee: &TypeExpression,
    assigned: &TypeExpression,
    because: &[TypeAssignability],
    invariant: bool,
) -> fmt::Result {
    if indentation > 0 {
        writeln!(f)?;
    }

    for _ in 0..indentation {
        write!(f, "  ")?;
    }

    if indentation > 0 {
        write!(f, "because ")?;
    }

    if invariant {
        write!(f, "`{}` isn't the same as `{}`", assigned, assignee)?;
    } else {
        write!(f, "`{}` cannot act as `{}`", assigned, assignee)?;
    }

    for b in because.iter() {
        format_type_assignability(f, indentation + 1, b)?;
    }

    Ok(())
}

fn format_type_assignability(
    f: &mut fmt::Formatter,
    indentation: usize,
    assignability: &TypeAssignability,
) -> fmt::Result {
    match assignability {
        TypeAssignability::Valid => Ok(()),
        TypeAssignability::Invalid {
            assignee,
            assigned,
            because,
            invariant,
        } => format_invalid_type_assignability(
            f,
            indentation,
            assignee,
            assigned,
            because,
            *invariant,
        ),
    }
}

impl fmt::Display for TypeAssignability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_type_assignability(f, 0, self)?;
        write!(f, ".")
    }
}
