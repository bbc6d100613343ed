//! Catalog page: book list and add form

use crate::models::Book;

use super::{escape, layout, DATETIME_FORMAT, DATE_FORMAT};

pub fn render(books: &[Book]) -> String {
    let mut content = String::from(
        r#"<h2>Adicionar livro</h2>
<form method="post" action="/adicionar_livro">
<label>Título <input type="text" name="titulo" required></label>
<label>Autor <input type="text" name="autor" required></label>
<label>Data de publicação <input type="date" name="data_publicacao" required></label>
<button type="submit">Adicionar</button>
</form>
<h2>Livros cadastrados</h2>
"#,
    );

    if books.is_empty() {
        content.push_str("<p>Nenhum livro cadastrado.</p>\n");
        return layout("Biblioteca", &content);
    }

    content.push_str(
        "<table>\n<tr><th>Título</th><th>Autor</th><th>Publicação</th><th>Cadastro</th><th>Ações</th></tr>\n",
    );
    for book in books {
        content.push_str(&format!(
            "<tr><td>{title}</td><td>{author}</td><td>{published}</td><td>{registered}</td>\
             <td><a href=\"/emprestar/{id}\">Emprestar</a> <a href=\"/remover/{id}\">Remover</a></td></tr>\n",
            title = escape(&book.title),
            author = escape(&book.author),
            published = book.publication_date.format(DATE_FORMAT),
            registered = book.registered_at.format(DATETIME_FORMAT),
            id = book.id,
        ));
    }
    content.push_str("</table>\n");

    layout("Biblioteca", &content)
}
