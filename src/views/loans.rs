//! Loan pages: loan form for one book and the loan list

use chrono::{DateTime, Utc};

use crate::models::{Book, LoanDetails, LoanStatus, LOAN_DURATION_DAYS};

use super::{escape, layout, DATETIME_FORMAT, DATE_FORMAT};

/// Loan form for one selected book
pub fn render_form(book: &Book) -> String {
    let content = format!(
        r#"<p><strong>{title}</strong> de {author} ({published})</p>
<p>Prazo de devolução: {days} dias.</p>
<form method="post" action="/realizar_emprestimo/{id}">
<label>Nome do aluno <input type="text" name="nome_aluno" required></label>
<label>RA <input type="text" name="ra" maxlength="20" required></label>
<button type="submit">Emprestar</button>
</form>
"#,
        title = escape(&book.title),
        author = escape(&book.author),
        published = book.publication_date.format(DATE_FORMAT),
        days = LOAN_DURATION_DAYS,
        id = book.id,
    );
    layout("Emprestar livro", &content)
}

/// Loan list; overdue status is evaluated against `now`
pub fn render_list(loans: &[LoanDetails], now: DateTime<Utc>) -> String {
    if loans.is_empty() {
        return layout("Empréstimos", "<p>Nenhum empréstimo registrado.</p>\n");
    }

    let mut content = String::from(
        "<table>\n<tr><th>Livro</th><th>Aluno</th><th>RA</th><th>Empréstimo</th>\
         <th>Devolver até</th><th>Devolução</th><th>Situação</th><th>Ações</th></tr>\n",
    );
    for loan in loans {
        let status = loan.status(now);
        let class = match status {
            LoanStatus::Active => "ativo",
            LoanStatus::Overdue => "atrasado",
            LoanStatus::Returned => "devolvido",
        };
        let returned_at = loan
            .returned_at
            .map(|d| d.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        let action = if loan.returned {
            String::new()
        } else {
            format!("<a href=\"/devolver/{}\">Devolver</a>", loan.id)
        };

        content.push_str(&format!(
            "<tr><td>{title}</td><td>{student}</td><td>{ra}</td><td>{loaned}</td><td>{due}</td>\
             <td>{returned}</td><td class=\"{class}\">{label}</td><td>{action}</td></tr>\n",
            title = escape(&loan.book_title),
            student = escape(&loan.student_name),
            ra = escape(&loan.student_ra),
            loaned = loan.loaned_at.format(DATETIME_FORMAT),
            due = loan.due_at.format(DATETIME_FORMAT),
            returned = returned_at,
            class = class,
            label = status.label(),
            action = action,
        ));
    }
    content.push_str("</table>\n");

    layout("Empréstimos", &content)
}
