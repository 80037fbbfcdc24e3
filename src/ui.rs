// Everything task-specific is rendered by the script from `/api/todos`.
pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Todo</title>
  <style>
    :root {
      color-scheme: light;
      font-family: "Inter", system-ui, -apple-system, sans-serif;
      background: #f4f5f7;
    }
    body {
      margin: 0;
      padding: 32px;
      display: flex;
      justify-content: center;
    }
    .app {
      width: min(720px, 100%);
      background: #ffffff;
      border-radius: 16px;
      box-shadow: 0 24px 48px rgba(15, 23, 42, 0.08);
      padding: 28px;
    }
    h1 {
      margin: 0 0 16px 0;
      font-size: 28px;
      letter-spacing: -0.02em;
    }
    h2 {
      font-size: 18px;
      margin: 0 0 12px 0;
    }
    form {
      display: grid;
      gap: 12px;
      margin-bottom: 24px;
    }
    input[type="text"], textarea {
      padding: 12px 14px;
      border-radius: 10px;
      border: 1px solid #e2e8f0;
      font-size: 15px;
      font-family: inherit;
    }
    button {
      border: none;
      border-radius: 10px;
      padding: 12px 16px;
      background: #111827;
      color: white;
      font-weight: 600;
      cursor: pointer;
    }
    .todo-list {
      display: grid;
      gap: 12px;
    }
    .task {
      padding: 12px 16px;
      border-radius: 12px;
      background: #f8fafc;
      border: 1px solid #e2e8f0;
    }
    .task.completed {
      background: #dcfce7;
      border-color: #bbf7d0;
    }
    .task h3 {
      margin: 0 0 4px 0;
      font-size: 16px;
    }
    .task p {
      margin: 0 0 12px 0;
      color: #64748b;
    }
    .actions {
      display: flex;
      gap: 8px;
    }
    .actions button {
      background: #e2e8f0;
      color: #0f172a;
      padding: 8px 12px;
    }
    .actions button.delete {
      background: #fee2e2;
      color: #991b1b;
    }
  </style>
</head>
<body>
  <div class="app">
    <h1>Todo list</h1>
    <h2>Add a new task</h2>
    <form id="todoForm">
      <input type="text" id="title" placeholder="Title" required />
      <textarea id="description" placeholder="Description"></textarea>
      <button type="submit">Add</button>
    </form>
    <div id="todoList" class="todo-list"></div>
  </div>

  <script>
    // maxlength counts UTF-16 units; the server counts code points.
    function limitChars(id, max) {
      const field = document.getElementById(id);
      field.addEventListener('input', () => {
        const tooLong = Array.from(field.value).length > max;
        field.setCustomValidity(tooLong ? `At most ${max} characters` : '');
      });
    }

    limitChars('title', 100);
    limitChars('description', 200);

    function renderTask(todo) {
      const card = document.createElement('div');
      card.className = todo.completed ? 'task completed' : 'task';

      const title = document.createElement('h3');
      title.textContent = todo.title;

      const description = document.createElement('p');
      description.textContent = todo.description || 'no description';

      const actions = document.createElement('div');
      actions.className = 'actions';

      const toggle = document.createElement('button');
      toggle.textContent = todo.completed ? 'mark incomplete' : 'mark complete';
      toggle.onclick = () => toggleTask(todo.id);

      const remove = document.createElement('button');
      remove.className = 'delete';
      remove.textContent = 'delete';
      remove.onclick = () => deleteTask(todo.id);

      actions.append(toggle, remove);
      card.append(title, description, actions);
      return card;
    }

    function loadTasks() {
      fetch('/api/todos')
        .then(response => response.json())
        .then(todos => {
          const list = document.getElementById('todoList');
          list.replaceChildren(...todos.map(renderTask));
        });
    }

    document.getElementById('todoForm').onsubmit = function (event) {
      event.preventDefault();
      const title = document.getElementById('title').value;
      const description = document.getElementById('description').value;

      fetch('/api/todos', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ title, description })
      }).then(() => {
        document.getElementById('title').value = '';
        document.getElementById('description').value = '';
        loadTasks();
      });
    };

    function toggleTask(id) {
      fetch(`/api/todos/${id}/toggle`, { method: 'POST' }).then(() => loadTasks());
    }

    function deleteTask(id) {
      if (confirm('Delete this task?')) {
        fetch(`/api/todos/${id}`, { method: 'DELETE' }).then(() => loadTasks());
      }
    }

    loadTasks();
  </script>
</body>
</html>
"#;
